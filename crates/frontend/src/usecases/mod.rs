pub mod u101_directory_lookup;
