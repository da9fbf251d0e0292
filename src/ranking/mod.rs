pub mod engine;
pub mod podium;
pub mod ppgr;

pub use engine::rank;
pub use podium::podium;
pub use ppgr::ppgr;
