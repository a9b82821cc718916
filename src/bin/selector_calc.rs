use rugbycv_engine::selector::{
    derive_selector, APPLY_TO_JOB_SIGNATURE, CREATE_PROFILE_SIGNATURE, GET_JOB_SIGNATURE,
    GET_PROFILE_SIGNATURE, POST_JOB_SIGNATURE,
};

fn main() {
    let signatures = vec![
        CREATE_PROFILE_SIGNATURE,
        GET_PROFILE_SIGNATURE,
        POST_JOB_SIGNATURE,
        APPLY_TO_JOB_SIGNATURE,
        GET_JOB_SIGNATURE,
    ];

    for sig in signatures {
        println!("{} -> {}", derive_selector(sig), sig);
    }
}
