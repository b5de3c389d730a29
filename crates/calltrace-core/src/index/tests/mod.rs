mod tests_indexer;
