pub mod query_template_fs_adapter;
