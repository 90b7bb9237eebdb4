pub mod histogram;
pub mod median_cut;
