pub mod create;
pub mod schema;

/// A scenario selected from the command line.
pub trait Command {
    fn execute(&mut self);
}
