pub mod deploy;
pub mod prelude;
