pub mod input;
pub mod output;
pub mod handler;
pub mod programs {
    pub mod programs;
    pub mod arrays;
    pub mod grids;
    pub mod digits;
    pub mod misc;
}
