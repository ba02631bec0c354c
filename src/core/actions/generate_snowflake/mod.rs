pub mod errors;
pub mod initial_triangle;
pub mod refine;
pub mod refine_parallel_rayon;
