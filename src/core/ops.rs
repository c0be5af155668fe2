mod elem_ops;
mod reduce_ops;
