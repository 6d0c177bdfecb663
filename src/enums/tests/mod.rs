mod tests_data_types;
mod tests_fallback;
