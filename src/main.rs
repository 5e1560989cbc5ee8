fn main() {
    dkan_schema_lib::run()
}
