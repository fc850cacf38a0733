//! Generated module templates
//!
//! Both templates are embedded in the binary. Each holds a single `{{ data }}`
//! placeholder for the JSON array, followed by the accessor functions the UI
//! imports.

use crate::content::Collection;

const DATA_PLACEHOLDER: &str = "{{ data }}";

const BLOG_MODULE: &str = include_str!("blog.js");
const PROJECTS_MODULE: &str = include_str!("projects.js");

/// Template for a collection's generated module
pub fn module_template(collection: Collection) -> &'static str {
    match collection {
        Collection::Blog => BLOG_MODULE,
        Collection::Projects => PROJECTS_MODULE,
    }
}

/// Fill a module template with the serialized data array
pub fn render_module(collection: Collection, data_json: &str) -> String {
    module_template(collection).replacen(DATA_PLACEHOLDER, data_json, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_have_one_placeholder() {
        for collection in Collection::ALL {
            assert_eq!(module_template(collection).matches(DATA_PLACEHOLDER).count(), 1);
        }
    }

    #[test]
    fn test_data_is_not_rescanned() {
        let out = render_module(Collection::Blog, r#"["{{ data }}"]"#);
        assert!(out.contains(r#"export const blogPosts = ["{{ data }}"];"#));
    }

    #[test]
    fn test_blog_format_date_only_forces_utc_for_utc_strings() {
        let blog = module_template(Collection::Blog);
        assert!(!blog.contains("    timeZone: 'UTC'\n"));
        assert!(blog.contains("...(isUtcDate(dateString) ? { timeZone: 'UTC' } : {})"));
        assert!(blog.contains(r"/^\d{4}-\d{2}-\d{2}$/.test(dateString)"));
        assert!(blog.contains(r"/(Z|[+-]\d{2}:?\d{2})$/.test(dateString)"));
    }

    #[test]
    fn test_exported_surface() {
        let blog = module_template(Collection::Blog);
        for name in [
            "getPostBySlug",
            "getPostsByCategory",
            "searchPosts",
            "getCategories",
            "getTags",
            "formatDate",
            "createBlogPost",
        ] {
            assert!(blog.contains(&format!("export const {} =", name)), "{}", name);
        }

        let projects = module_template(Collection::Projects);
        for name in [
            "getProjectBySlug",
            "getProjectsByCategory",
            "getProjectsByType",
            "searchProjects",
            "getCategories",
            "getTechStack",
            "getYears",
            "createProject",
        ] {
            assert!(projects.contains(&format!("export const {} =", name)), "{}", name);
        }
    }
}
