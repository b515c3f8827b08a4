//! Testing utilities and harness for Clearpose

pub mod robot;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
}
