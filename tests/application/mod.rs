mod content_ingestion_test;
