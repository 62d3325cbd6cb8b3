mod test_second_peer_joins;
