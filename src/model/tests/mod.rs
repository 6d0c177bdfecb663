mod tests_elements;
mod tests_environment;
mod tests_reference;
