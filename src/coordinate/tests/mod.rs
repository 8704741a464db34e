mod crs_tests;
