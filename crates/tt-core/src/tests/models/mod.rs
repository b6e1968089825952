mod enums;
mod project;
mod task;
mod team_member;
