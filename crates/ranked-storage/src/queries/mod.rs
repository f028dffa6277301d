pub mod category_ops;
