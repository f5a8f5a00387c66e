use inventory_test_utils::prelude::*;

mod product;
