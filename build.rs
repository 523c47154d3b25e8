fn main() {
    // Embeds the [package.metadata.winres] block into the Windows executable.
    #[cfg(windows)]
    {
        let res = winres::WindowsResource::new();
        if let Err(e) = res.compile() {
            println!("cargo:warning=could not embed Windows resources: {}", e);
        }
    }
}
