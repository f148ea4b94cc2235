mod audio_record_test;
