mod marker_tests;
mod navigator_tests;
