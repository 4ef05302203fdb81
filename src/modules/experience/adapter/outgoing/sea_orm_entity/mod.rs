pub mod work_experiences;
