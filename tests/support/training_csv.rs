use std::path::{Path, PathBuf};

use course_recommender::interests::INTEREST_NAMES;

/// Each course is driven by two interests; every row also gets one unrelated interest.
pub const PROFILES: [(&str, &str, &str); 5] = [
    (
        "Coding",
        "Mathematics",
        "B.Tech.-Computer Science and Engineering",
    ),
    ("Doctor", "Biology", "MBBS"),
    ("Accounting", "Economics", "CA- Chartered Accountancy"),
    ("Drawing", "Designing", "BVA- Bachelor of Visual Arts"),
    (
        "Journalism",
        "Content writing",
        "BJMC- Bachelor of Journalism and Mass Communication",
    ),
];

/// Write a training table with `repeats` rows per course profile.
pub fn write_profiles_csv(dir: &Path, name: &str, repeats: usize) -> PathBuf {
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path).expect("create csv");
    let mut header: Vec<&str> = INTEREST_NAMES.to_vec();
    header.push("Courses");
    writer.write_record(&header).expect("write header");

    for repeat in 0..repeats {
        for (row, (first, second, course)) in PROFILES.iter().enumerate() {
            let noise = INTEREST_NAMES[(repeat * 7 + row * 13) % INTEREST_NAMES.len()];
            let mut record: Vec<&str> = INTEREST_NAMES
                .iter()
                .map(|name| {
                    if name == first || name == second || *name == noise {
                        "1"
                    } else {
                        "0"
                    }
                })
                .collect();
            record.push(course);
            writer.write_record(&record).expect("write row");
        }
    }
    writer.flush().expect("flush csv");
    path
}
