mod cycle_tests;
mod fs_tests;
