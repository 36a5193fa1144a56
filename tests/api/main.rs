// fn main not required
mod helpers;
mod not_found;

// black-box tests are most robust, as they reflect exactly how clients
// interact with the API (request type, path, headers)
//
// grouping all tests in a single tests/api dir keeps linking sequential-cost
// down: one executable for the whole suite
