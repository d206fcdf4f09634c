mod arithmetic_properties;
