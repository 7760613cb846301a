fn main() -> Result<(), Box<dyn std::error::Error>> {
    recount::runtime::run()
}
