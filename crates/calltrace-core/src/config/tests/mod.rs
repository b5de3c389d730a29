mod tests_index_config;
