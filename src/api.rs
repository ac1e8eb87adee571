pub mod opensprinkler;
