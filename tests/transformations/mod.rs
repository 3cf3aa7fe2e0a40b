pub mod example_transformations;
