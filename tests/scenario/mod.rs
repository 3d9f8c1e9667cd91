//! End to end flows across several endpoints.

mod seed;
