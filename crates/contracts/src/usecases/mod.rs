pub mod u100_estimate;
