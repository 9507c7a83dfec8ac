mod tests_local;
