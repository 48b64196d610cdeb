mod registry_tests {
    pub mod helpers;

    mod artifacts;
    mod branches;
    mod groups;
    mod ids;
    mod rules;
    mod system;
    mod transport;
    mod versions;
}
