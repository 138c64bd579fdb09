pub mod artifact_type;
pub mod budget_type;
pub mod operation_object;
pub mod operation_type;
pub mod order_action;
pub mod promotion_type;

pub use artifact_type::ArtifactType;
pub use budget_type::BudgetType;
pub use operation_object::OperationObject;
pub use operation_type::OperationType;
pub use order_action::OrderAction;
pub use promotion_type::PromotionType;
