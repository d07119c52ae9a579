pub mod output_types;
