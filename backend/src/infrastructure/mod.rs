pub mod inbox;
pub mod logging;
