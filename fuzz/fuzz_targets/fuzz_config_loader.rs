#![no_main]

use clusterboot::config::{AGENT_CONFIG_FILENAME, ConfigLoader, validate};
use clusterboot::hostfiles::host_config_files;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let loader = ConfigLoader::with_defaults();

    // Decoding may fail; it must not panic. Anything that decodes must
    // survive validation and derivation.
    if let Ok(config) = loader.decode(AGENT_CONFIG_FILENAME, data) {
        let _ = validate(&config);
        let _ = host_config_files(Some(&config));
    }
});
