pub mod normalize_company_name;
pub mod ratcliff_obershelp_similarity;
pub mod sort_ranked_company_names;

pub use normalize_company_name::normalize_company_name;
pub use ratcliff_obershelp_similarity::ratcliff_obershelp_similarity;
pub use sort_ranked_company_names::sort_ranked_company_names;
