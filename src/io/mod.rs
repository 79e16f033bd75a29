pub mod exit;
pub mod szs;
pub mod tptp;
