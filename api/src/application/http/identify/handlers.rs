pub mod identify_object;
