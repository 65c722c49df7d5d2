// This is a metapackage for the workspace-wide integration tests.
// The member crates carry the actual implementation.

// Test helpers and utilities
pub mod test_helpers {
    #[cfg(test)]
    mod tests {
        #[test]
        fn simple_test() {
            assert!(true);
        }
    }
}
