mod vertex;
