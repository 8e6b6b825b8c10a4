pub mod partial_min_max;
