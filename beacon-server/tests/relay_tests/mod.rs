mod test_ice_candidate_unicast;
