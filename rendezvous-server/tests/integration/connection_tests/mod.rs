mod test_welcome_carries_handle;
