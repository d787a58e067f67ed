pub mod m202608250001_create_users;
pub mod m202608250002_create_departments;
pub mod m202608250003_create_sections;
pub mod m202608250004_create_subjects;
pub mod m202608250005_create_students;
pub mod m202608250006_create_faculty;
pub mod m202608250007_create_timetable;
pub mod m202608250008_create_attendance;
pub mod m202608250009_create_marks;
