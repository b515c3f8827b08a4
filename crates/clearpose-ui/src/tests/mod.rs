mod clear_text_field_tests;
