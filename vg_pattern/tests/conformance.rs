mod common;

use common::assert_conforms;

const SAMPLES: usize = 500;

#[test]
fn mixed_constructs() {
    assert_conforms(r"^G-\d{1,2}\d+\w+\d{1}(this|that)?[12]{2}$", SAMPLES, 1);
}

#[test]
fn fixed_shape_code() {
    assert_conforms(r"^[A-Z]{3}-\d{4}$", SAMPLES, 2);
}

#[test]
fn alternation_and_hex() {
    assert_conforms(r"^(red|green|blue)-[a-f0-9]{6}$", SAMPLES, 3);
}

#[test]
fn phone_number() {
    assert_conforms(r"^\d{3}-\d{3}-\d{4}$", SAMPLES, 4);
}

#[test]
fn all_markers() {
    assert_conforms(r"^a?b*c+$", SAMPLES, 5);
}

#[test]
fn escaped_dots() {
    assert_conforms(r"^[a-z]+@(mail|post)\.com$", SAMPLES, 6);
    assert_conforms(r"^v\d\.\d{1,2}\.\d*$", SAMPLES, 7);
}

#[test]
fn wildcard() {
    assert_conforms(r"^x.y$", SAMPLES, 8);
    assert_conforms(r"^.{4,8}$", SAMPLES, 9);
}

#[test]
fn ranges_and_literals_in_one_class() {
    assert_conforms(r"^[A-Za-z0-9_]{8,12}$", SAMPLES, 10);
    assert_conforms(r"^[xyz1-3]{2}$", SAMPLES, 11);
}

#[test]
fn quantified_groups() {
    assert_conforms(r"^(ab|cd){2,3}$", SAMPLES, 12);
    assert_conforms(r"^(on|off)?!$", SAMPLES, 13);
}

#[test]
fn no_metacharacters() {
    assert_conforms(r"^plain-text_123$", 10, 14);
}
