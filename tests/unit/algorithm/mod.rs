pub mod propagation;
pub mod random;
