mod coordinate_utils_tests;
mod format_utils_tests;
