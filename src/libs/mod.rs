pub mod adj;
pub mod io;
pub mod order;
