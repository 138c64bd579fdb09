pub mod p910_budget_operations;
