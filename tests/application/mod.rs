mod audio_service_test;
