mod proptest_place_order;
