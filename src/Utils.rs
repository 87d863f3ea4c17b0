//! different utility modules used throughout the project
/// tiny module to switch on terminal logging with a loglevel string
pub mod logger;
/// run the symbolic pipeline described by a task document
pub mod task;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
///
mod task_parser_tests;
