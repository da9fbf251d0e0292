pub mod update;

pub use update::apply_update;
