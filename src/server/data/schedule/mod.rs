pub mod assignment;
pub mod cycle;
pub mod employee;
pub mod productivity;
pub mod time_off;
